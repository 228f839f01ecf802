fn main() {
    std::process::exit(rlx_drv::main());
}
