#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{
    color_to_rgb, curl_to_rgb, init_tracing, render_slice_to_png, SliceConfig,
};
