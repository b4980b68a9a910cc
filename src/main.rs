fn main() {
    run_delete::app::cli::run();
}
