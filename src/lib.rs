#![no_std]

pub mod silk;
