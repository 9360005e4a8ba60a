use silk_control::silk::encoder::EncoderControl;
use silk_control::silk::{
    LTP_ORDER, LowFreqShaping, MAX_LPC_ORDER, MAX_NB_SUBFR, MAX_SHAPE_LPC_ORDER,
};

fn assert_all_zero(control: &EncoderControl) {
    assert_eq!(control.gains_q16, [0; MAX_NB_SUBFR]);
    assert_eq!(control.gains_unq_q16, [0; MAX_NB_SUBFR]);
    assert_eq!(control.pred_coef_q12, [[0; MAX_LPC_ORDER]; 2]);
    assert_eq!(control.ltp_coef_q14, [0; LTP_ORDER * MAX_NB_SUBFR]);
    assert_eq!(control.ltp_scale_q14, 0);
    assert_eq!(control.pitch_l, [0; MAX_NB_SUBFR]);
    assert_eq!(control.ar1_q13, [0; MAX_NB_SUBFR * MAX_SHAPE_LPC_ORDER]);
    assert_eq!(control.ar2_q13, [0; MAX_NB_SUBFR * MAX_SHAPE_LPC_ORDER]);
    assert_eq!(control.lf_shp_q14, [LowFreqShaping::ZERO; MAX_NB_SUBFR]);
    assert_eq!(control.gains_pre_q14, [0; MAX_NB_SUBFR]);
    assert_eq!(control.harm_boost_q14, [0; MAX_NB_SUBFR]);
    assert_eq!(control.tilt_q14, [0; MAX_NB_SUBFR]);
    assert_eq!(control.harm_shape_gain_q14, [0; MAX_NB_SUBFR]);
    assert_eq!(control.lambda_q10, 0);
    assert_eq!(control.input_quality_q14, 0);
    assert_eq!(control.coding_quality_q14, 0);
    assert_eq!(control.sparseness_q8, 0);
    assert_eq!(control.pred_gain_q16, 0);
    assert_eq!(control.lt_pred_cod_gain_q7, 0);
    assert_eq!(control.res_nrg, [0; MAX_NB_SUBFR]);
    assert_eq!(control.res_nrg_q, [0; MAX_NB_SUBFR]);
    assert_eq!(control.last_gain_index_prev, 0);
    assert!(control.is_zeroed());
}

fn assert_extents(control: &EncoderControl) {
    assert_eq!(control.gains_q16.len(), MAX_NB_SUBFR);
    assert_eq!(control.gains_unq_q16.len(), MAX_NB_SUBFR);
    assert_eq!(control.pred_coef_q12.len(), 2);
    for row in &control.pred_coef_q12 {
        assert_eq!(row.len(), MAX_LPC_ORDER);
    }
    assert_eq!(control.ltp_coef_q14.len(), LTP_ORDER * MAX_NB_SUBFR);
    assert_eq!(control.pitch_l.len(), MAX_NB_SUBFR);
    assert_eq!(control.ar1_q13.len(), MAX_NB_SUBFR * MAX_SHAPE_LPC_ORDER);
    assert_eq!(control.ar2_q13.len(), MAX_NB_SUBFR * MAX_SHAPE_LPC_ORDER);
    assert_eq!(control.lf_shp_q14.len(), MAX_NB_SUBFR);
    assert_eq!(control.gains_pre_q14.len(), MAX_NB_SUBFR);
    assert_eq!(control.harm_boost_q14.len(), MAX_NB_SUBFR);
    assert_eq!(control.tilt_q14.len(), MAX_NB_SUBFR);
    assert_eq!(control.harm_shape_gain_q14.len(), MAX_NB_SUBFR);
    assert_eq!(control.res_nrg.len(), MAX_NB_SUBFR);
    assert_eq!(control.res_nrg_q.len(), MAX_NB_SUBFR);
}

// Writes the largest value each field's storage type can hold.
fn saturate(control: &mut EncoderControl) {
    control.gains_q16.fill(i32::MAX);
    control.gains_unq_q16.fill(i32::MAX);
    for row in &mut control.pred_coef_q12 {
        row.fill(i16::MAX);
    }
    control.ltp_coef_q14.fill(i16::MAX);
    control.ltp_scale_q14 = i32::MAX;
    control.pitch_l.fill(i32::MAX);
    control.ar1_q13.fill(i16::MAX);
    control.ar2_q13.fill(i16::MIN);
    control.lf_shp_q14.fill(LowFreqShaping::new(i16::MAX, i16::MIN));
    control.gains_pre_q14.fill(i32::MAX);
    control.harm_boost_q14.fill(i32::MAX);
    control.tilt_q14.fill(i32::MIN);
    control.harm_shape_gain_q14.fill(i32::MAX);
    control.lambda_q10 = i32::MAX;
    control.input_quality_q14 = i32::MAX;
    control.coding_quality_q14 = i32::MAX;
    control.sparseness_q8 = i32::MAX;
    control.pred_gain_q16 = i32::MAX;
    control.lt_pred_cod_gain_q7 = i32::MIN;
    control.res_nrg.fill(i32::MAX);
    control.res_nrg_q.fill(i32::MIN);
    control.last_gain_index_prev = i8::MAX;
}

#[test]
fn construction_yields_all_zero_record() {
    let control = EncoderControl::new();
    assert_all_zero(&control);
    assert_extents(&control);
    assert_eq!(EncoderControl::default(), control);
}

#[test]
fn reset_after_arbitrary_mutation_is_total() {
    let mut control = EncoderControl::new();
    let mut seed = 0x1234_5678u32;
    let mut next = || {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        (seed >> 1) as i32
    };

    for value in control.gains_q16.iter_mut().chain(control.tilt_q14.iter_mut()) {
        *value = next();
    }
    for value in control.ar1_q13.iter_mut().chain(control.ltp_coef_q14.iter_mut()) {
        *value = next() as i16;
    }
    for pair in &mut control.lf_shp_q14 {
        *pair = LowFreqShaping::unpack(next());
    }
    control.res_nrg_q = [next(), next(), next(), next()];
    control.sparseness_q8 = next();
    control.last_gain_index_prev = next() as i8 | 1;
    assert!(!control.is_zeroed());

    control.reset();
    assert_all_zero(&control);
    assert_extents(&control);
}

#[test]
fn reset_is_idempotent() {
    let mut once = EncoderControl::new();
    saturate(&mut once);
    once.reset();

    let mut twice = EncoderControl::new();
    saturate(&mut twice);
    twice.reset();
    twice.reset();

    assert_eq!(once, twice);
    assert_all_zero(&twice);
}

#[test]
fn reset_on_fresh_record_is_a_no_op() {
    let mut control = EncoderControl::new();
    control.reset();
    assert_all_zero(&control);
    assert_extents(&control);
}

#[test]
fn gain_and_gain_index_are_cleared() {
    let mut control = EncoderControl::new();
    control.gains_q16[0] = 12_345;
    control.last_gain_index_prev = 7;

    control.reset();

    assert_eq!(control.gains_q16[0], 0);
    assert_eq!(control.last_gain_index_prev, 0);
}

#[test]
fn independent_records_do_not_alias() {
    let mut left = EncoderControl::new();
    let right = EncoderControl::new();

    saturate(&mut left);

    assert!(!left.is_zeroed());
    assert_all_zero(&right);
}

#[test]
fn saturated_record_resets_without_overflow() {
    let mut control = EncoderControl::new();
    saturate(&mut control);
    assert_eq!(control.lf_shp_packed(MAX_NB_SUBFR)[0], (i32::from(i16::MAX) << 16) | 0x8000);

    control.reset();

    assert_all_zero(&control);
    assert_extents(&control);
}
