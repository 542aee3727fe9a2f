use slashbind::Request;
use slashbind::id::{RoleId, UserId};
use slashbind::interaction::OptionValue;
use slashbind::kind::OptionKind;

#[derive(Request, Default, Debug, PartialEq)]
struct Lookup {
    #[option(desc = "who to look up", optional)]
    name: UserId,
    #[option(desc = "role filter")]
    role: Option<RoleId>,
}

fn main() {
    assert!(!Lookup::FIELDS[0].required);
    assert!(!Lookup::FIELDS[1].required);
    assert_eq!(Lookup::FIELDS[1].kind, OptionKind::Role);

    let mut req = Lookup::default();
    req.assign("role", &OptionValue::Snowflake { kind: OptionKind::Role, id: 9 })
        .unwrap();
    assert_eq!(req.role, Some(RoleId(9)));

    assert!(req.assign("name", &OptionValue::Text("x".into())).is_err());
    assert_eq!(req.name, UserId(0));

    assert!(req.assign("missing", &OptionValue::Integer(1)).is_err());
}
