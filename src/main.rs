fn main() {
    gebug::app::cli::run();
}
