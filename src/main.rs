fn main() {
    allcount::app::logging::init_tracing();
    allcount::app::cli::run();
}
