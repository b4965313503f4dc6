//! 金额换算
//!
//! XP 点数与代币最小单位之间按 18 位精度换算。

use alloy::primitives::U256;

/// 18 位精度的换算因子
const DECIMALS: u32 = 18;

/// 将 XP 点数换算为代币最小单位（n -> n * 10^18）
pub fn xp_to_base_units(xp: u64) -> U256 {
    U256::from(xp) * U256::from(10u64).pow(U256::from(DECIMALS))
}
