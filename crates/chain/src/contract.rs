//! 代币合约接口
//!
//! 只声明铸币流程消费的单个合约函数，与部署合约的 ABI 对应。

use alloy::sol;

sol!(
    function mint(address to, uint256 amount) external;
);
