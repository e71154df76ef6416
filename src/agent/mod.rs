pub mod interface;
pub mod runner;
pub mod stateless_llm_factory;

pub mod stateless_llm;

pub use interface::*;
pub use runner::*;
pub use stateless_llm_factory::*;
pub use stateless_llm::*;
