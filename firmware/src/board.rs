/// Board-specific operations the firmware relies on.
///
/// Everything here is an external collaborator: register-level bring-up,
/// console transport, fault storage and the watchdog live behind this trait.
pub trait Board: Sync {
    /// Configure clocks, PLLs and power domains
    fn early_init(&self) {}

    /// Configure GPIO, UART, timers and other peripherals
    fn init_peripherals(&self) {}

    /// Write raw text to the debug console
    fn write_console(&self, text: &str);

    /// Currently measured system clock in Hz
    fn clock_frequency_hz(&self) -> u32;

    /// Whether the external sensor has stopped responding
    fn sensor_timed_out(&self) -> bool {
        false
    }

    /// Whether the communication buffer is overflowing
    fn comm_buffer_full(&self) -> bool {
        false
    }

    /// Show a fault code on the error LEDs
    fn set_fault_led(&self, _code: u8) {}

    /// Persist a fault record to non-volatile storage
    fn store_fault_log(&self, _constraint_id: u32, _message: &str) {}

    /// Reset the system through the watchdog
    fn watchdog_reset(&self) -> !;

    /// Idle until the next interrupt
    fn wait_for_interrupt(&self) {
        core::hint::spin_loop();
    }
}
