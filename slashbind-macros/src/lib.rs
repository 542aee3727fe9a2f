use proc_macro::TokenStream;
use syn::{DeriveInput, Item, parse_macro_input};

mod command;
mod request;
mod snowflake_id;
mod utils;

/// 请求结构派生宏
/// - 为具名字段结构体实现 `::slashbind::request::Request`（`FIELDS/assign`）
/// - 字段顺序即远端 schema 的选项顺序；线上名称为字段名小写
/// - 字段属性：`#[option(desc = "...")]`，追加 `optional` 标记为非必填
/// - 结构体需另行实现 `Default`（零值实例）
#[proc_macro_derive(Request, attributes(option))]
pub fn derive_request(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    request::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// 命令元数据派生宏
/// - 为目标类型实现 `::slashbind::command::Command`
/// - 参数：`#[command(name = "...", human_name = "...", description = "...")]`，`name` 必填
#[proc_macro_derive(Command, attributes(command))]
pub fn derive_command(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    command::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Snowflake 标识符宏
/// 用于 `tuple struct` 形式的 ID 类型（例如 `struct UserId(u64);`），
/// 参数 `kind = User | Channel | Role` 指定其在远端 schema 中的引用类别。
#[proc_macro_attribute]
pub fn snowflake_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as snowflake_id::SnowflakeAttrConfig);
    let item = parse_macro_input!(item as Item);
    snowflake_id::expand(cfg, item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
