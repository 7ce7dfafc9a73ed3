use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata backs `notify-bridge --version`
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
