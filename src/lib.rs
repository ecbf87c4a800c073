//! gpui_sortviz: instrumented sorting algorithms, run control and bar rendering for GPUI

pub mod algorithms;
pub mod analysis;
pub mod consumer;
pub mod controller;
pub mod data_generator;
pub mod data_types;
pub mod error;
pub mod frame;
pub mod instrumented;
pub mod pacing;
pub mod rendering;
pub mod scales;
pub mod theme;
pub mod transform;
pub mod utils;

pub use algorithms::{algorithm_by_name, available_algorithms, SortAlgorithm};
pub use consumer::{EventRecorder, NullConsumer, StepConsumer};
pub use controller::RunController;
pub use data_generator::{load_from_file, parse_array, DataGenerator};
pub use data_types::{AlgorithmId, EventKind, RunReport, RunState, StatisticsSnapshot, StepEvent};
pub use error::{Result, SortError};
pub use frame::{BarFrame, BarState, FrameSink};
pub use instrumented::{CancellationToken, InstrumentedArray};
pub use pacing::{AnimationSpeed, Pacing};
pub use theme::SortTheme;
