use slashbind::Request;
use slashbind::id::{ChannelId, RoleId, UserId};
use slashbind::kind::OptionKind;

#[derive(Request, Default)]
struct Everything {
    #[option(desc = "text")]
    text: String,
    #[option(desc = "number")]
    count: i64,
    #[option(desc = "flag")]
    flag: bool,
    #[option(desc = "user")]
    user: UserId,
    #[option(desc = "channel")]
    channel: ChannelId,
    #[option(desc = "role")]
    role: RoleId,
}

// 无属性字段：描述为空、默认必填
#[derive(Request, Default)]
struct Bare {
    r#type: String,
}

#[derive(Request, Default)]
struct Empty {}

fn main() {
    let kinds: Vec<OptionKind> = Everything::FIELDS.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![
            OptionKind::String,
            OptionKind::Integer,
            OptionKind::Boolean,
            OptionKind::User,
            OptionKind::Channel,
            OptionKind::Role,
        ]
    );
    assert!(Everything::FIELDS.iter().all(|f| f.required));

    assert_eq!(Bare::FIELDS[0].ident, "type");
    assert_eq!(Bare::FIELDS[0].description, "");
    assert!(Bare::FIELDS[0].required);

    assert!(Empty::FIELDS.is_empty());
}
