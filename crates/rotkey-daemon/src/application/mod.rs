//! Application layer use cases.

pub mod pump_events;

pub use pump_events::PumpEventsUseCase;
