fn main() {
    yew::Renderer::<ui_kit::App>::new().render();
}
