pub mod main_memory;
pub mod recency_list;

pub use main_memory::MainMemory;
pub use recency_list::RecencyList;
