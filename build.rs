fn main() {
    // Scaffolding for the mobile bindings comes from uniffi::setup_scaffolding!()
    // in uniffi_bindings.rs, so there is no UDL file to compile here.
    println!("cargo:rerun-if-changed=src/uniffi_bindings.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
