use std::{env, path::PathBuf};

/// Structures whose field offsets are published. bindgen pulls in whatever
/// they depend on (timeval, v4l2_rect, nested unions).
const LAYOUT_TYPES: &[&str] = &[
    "v4l2_format",
    "v4l2_streamparm",
    "v4l2_requestbuffers",
    "v4l2_buffer",
    "v4l2_cropcap",
    "v4l2_crop",
    "v4l2_fmtdesc",
    "v4l2_frmsizeenum",
    "v4l2_frmivalenum",
    "v4l2_queryctrl",
    "v4l2_event_subscription",
    "v4l2_event",
    "v4l2_querymenu",
    "v4l2_input",
    "v4l2_output",
    "v4l2_selection",
    "v4l2_timecode",
    "v4l2_pix_format",
    "v4l2_pix_format_mplane",
];

fn main() {
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap();
    if target_os != "linux" {
        panic!("Unsupported OS: {}. videodev2.h is only available on Linux.", target_os);
    }

    println!("cargo:rerun-if-changed=build.rs");

    generate_videodev2_bindings();
}

/// Run bindgen over <linux/videodev2.h> for the cargo target.
///
/// bindgen forwards `TARGET` to clang, so the generated `repr(C)` types carry
/// the layout of the real header for the architecture being built, along
/// with clang-derived size/offset assertions.
fn generate_videodev2_bindings() {
    let mut builder = bindgen::builder()
        .header_contents("videodev2_wrapper.h", "#include <linux/videodev2.h>\n")
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        .derive_default(false)
        .generate_comments(false)
        .layout_tests(true);

    for ty in LAYOUT_TYPES {
        builder = builder.allowlist_type(ty);
    }

    let out_path = PathBuf::from(env::var_os("OUT_DIR").unwrap()).join("videodev2.rs");
    builder
        .generate()
        .expect("Unable to generate videodev2.h bindings (is libclang installed?)")
        .write_to_file(&out_path)
        .expect("Couldn't write videodev2.h bindings");
}
