//! Entry point for the `sitelang` binary.

fn main() {
    std::process::exit(sitelang_cli::run());
}
