//! 服务层
//!
//! - [`catalog_service`] - 分类和商品的创建与查询

pub mod catalog_service;
