// Frequency counters — the three competing estimation strategies.

pub mod traits;
pub mod exact;
pub mod decay;
pub mod space_saving;
pub mod run;

pub use decay::DecayCounter;
pub use exact::ExactCounter;
pub use run::{run_counter, CounterReport};
pub use space_saving::SpaceSavingCounter;
pub use traits::FrequencyCounter;
