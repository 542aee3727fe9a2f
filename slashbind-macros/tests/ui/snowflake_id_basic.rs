use slashbind::kind::{OptionKind, OptionType};
use slashbind::snowflake_id;

#[snowflake_id(kind = Channel)]
#[derive(Debug)]
struct ThreadId(u64);

fn main() {
    assert_eq!(ThreadId::KIND, OptionKind::Channel);

    let id: ThreadId = "123".parse().unwrap();
    assert_eq!(id, ThreadId(123));
    assert_eq!(format!("{id}"), "123");
    assert_eq!(ThreadId::default(), ThreadId(0));

    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "123");
}
