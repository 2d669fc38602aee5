fn main() {
    std::process::exit(buildversion::app::startup::startup());
}
