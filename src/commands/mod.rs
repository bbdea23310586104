pub mod add;
pub mod clear;
pub mod days;
pub mod decode;
pub mod show;
