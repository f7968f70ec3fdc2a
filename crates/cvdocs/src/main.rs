fn main() {
    cvdocs_cli::run_main();
}
