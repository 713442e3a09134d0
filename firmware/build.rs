fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Compiled-in bounds overrides, read with `option_env!` in src/config.rs.
    for var in [
        "ASICFW_CLOCK_MIN_HZ",
        "ASICFW_CLOCK_MAX_HZ",
        "ASICFW_RAM_START",
        "ASICFW_RAM_SIZE",
    ] {
        println!("cargo:rerun-if-env-changed={var}");
    }
}
