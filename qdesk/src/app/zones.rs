use super::render;

pub fn run_zones() {
    println!("{}", render::zone_table());
}
