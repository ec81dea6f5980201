fn main() {
    // Routes tracing events to the browser console
    let _ = dioxus::logger::init(tracing::Level::INFO);
    dioxus::launch(gallery_web::App);
}
