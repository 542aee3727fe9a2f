use slashbind::Command;
use slashbind::command::CommandData;

#[derive(Command)]
#[command(name = "greet", human_name = "Greet", description = "Say hello")]
struct Greet;

#[derive(Command)]
#[command(name = "ping")]
struct Ping {
    _count: usize,
}

fn main() {
    assert_eq!(
        Greet.command_data(),
        CommandData::new("greet", "Greet", "Say hello")
    );
    assert_eq!(
        Ping { _count: 0 }.command_data(),
        CommandData::new("ping", "ping", "")
    );
}
