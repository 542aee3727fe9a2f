//! 标识符类型
//!
//! 三种引用类别（用户、频道、角色）在线上都以同一种 64 位 snowflake 表示，
//! 但远端 schema 需要区分它们，因此各自是独立的类型。
//!
use slashbind_macros::snowflake_id;

/// 用户 ID
#[snowflake_id(kind = User)]
pub struct UserId(pub u64);

/// 频道 ID
#[snowflake_id(kind = Channel)]
pub struct ChannelId(pub u64);

/// 角色 ID
#[snowflake_id(kind = Role)]
pub struct RoleId(pub u64);
