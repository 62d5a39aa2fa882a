pub mod sales_repository_impl;
