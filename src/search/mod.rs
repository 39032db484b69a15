pub mod dijkstra;
pub mod dijkstra_data;
pub mod queue;
