use peek_web::App;

fn main() {
    dioxus::launch(App);
}
