pub mod chart_service_impl;
pub mod extract_service_impl;
pub mod pipeline_service_impl;
