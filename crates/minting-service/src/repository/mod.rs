//! 仓储层
//!
//! 数据访问统一走共享连接池，SQL 与业务逻辑隔离在此层。

pub mod profile_repo;
pub mod traits;
pub mod transaction_repo;

pub use profile_repo::UserProfileRepository;
pub use traits::{ProfileRepositoryTrait, TransactionRepositoryTrait};
pub use transaction_repo::TransactionRepository;
