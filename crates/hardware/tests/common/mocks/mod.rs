/// Mock data bus.
pub mod bus;
