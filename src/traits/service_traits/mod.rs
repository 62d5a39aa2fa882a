pub mod chart_service;
pub mod extract_service;
pub mod pipeline_service;
