fn main() {
    location_dashboard::run();
}
