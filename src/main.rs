#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    if let Err(error) = kk_portfolio::frontend::run() {
        web_sys::console::error_1(&format!("portfolio failed to start: {error}").into());
    }
}
