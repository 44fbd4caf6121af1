pub mod format;
pub mod order;
pub mod paginate;
pub mod processor;
pub mod renderers;
pub mod search;

pub use processor::TabularDataProcessor;
pub use renderers::RendererRegistry;

#[cfg(test)]
mod tests;
