//! Identity Signal Input
//!
//! The pack's identity arrives as a PWM duty cycle, read by the host's
//! duty-cycle peripheral as a fraction in `[0.0, 1.0]`. The core only needs
//! the fraction, so any closure can stand in for the hardware.

/// Source of the normalized duty-cycle fraction
pub trait SignalSource {
    /// Current duty cycle, nominally in `[0.0, 1.0]`
    fn duty_cycle(&mut self) -> f64;
}

impl<F> SignalSource for F
where
    F: FnMut() -> f64,
{
    fn duty_cycle(&mut self) -> f64 {
        self()
    }
}
