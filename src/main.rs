use clap::Parser;

mod commands;
mod output;

use commands::rewrite;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "docroute")]
#[command(version = VERSION)]
#[command(about = "Update API endpoint URLs in documentation to match new route structure")]
struct Cli {
    #[command(flatten)]
    args: rewrite::RewriteArgs,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let result = rewrite::run(cli.args);
    if let Err(err) = &result {
        docroute::log_error!("{}", err);
    }

    let (json_result, exit_code) = output::map_cmd_result_to_json(result);
    output::print_json_result(json_result);

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
