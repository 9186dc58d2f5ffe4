mod conversion_engine;
mod job;

pub use conversion_engine::ConversionEngine;
pub use job::ConversionJob;
