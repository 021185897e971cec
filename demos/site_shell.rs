//! Drive a small browsing session through the router shell.
//!
//! Run with `cargo run --example site_shell`. Set `RUST_LOG=waymark=debug`
//! to watch route resolution as it happens.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use waymark::{meta, NavigationTarget, RouteTable, Router};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "waymark=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let table = RouteTable::builder()
        .route("/", "Index")
        .route("/blog", "Blog")
        .route("/blog/:rkey", "BlogPost")
        .route("/projects", "Projects")
        .route("/contact", "Contact")
        .route("/gallery/:id?", "Gallery")
        .route("*", "NotFound")
        .build();

    let pages = meta::from_toml_str(
        r#"
        [[page]]
        pattern = "/"
        exact = true
        title = "luna"
        description = "a website i made"

        [[page]]
        pattern = "/blog/:rkey?"
        title = "blog"
        description = "some blog posts i've written"

        [[page]]
        pattern = "/gallery/:id?"
        title = "gallery"
        description = "some images i've made"
        "#,
    )?;

    let mut router = Router::new(table);
    router.subscribe(|event| {
        tracing::info!(from = %event.from, to = %event.to, kind = ?event.kind, "location changed");
    });

    for destination in ["/blog", "/blog/3jxyz2abc", "/gallery/4", "/nowhere"] {
        match NavigationTarget::classify(destination) {
            NavigationTarget::Internal(path) => router.navigate(&path),
            NavigationTarget::External(url) => {
                tracing::info!(url = %url, "external link, handing off");
                continue;
            }
        }
        report(&router, &pages);
    }

    router.back();
    report(&router, &pages);

    Ok(())
}

fn report(router: &Router<&'static str>, pages: &meta::PageMetaMap) {
    let path = router.current_path();
    match router.current_match() {
        Some(matched) => {
            let params: Vec<String> = matched
                .params()
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect();
            let title = pages
                .resolve(path)
                .map(|page| page.title.as_str())
                .unwrap_or("luna");
            println!(
                "{path} -> {} (title: {title}, params: [{}])",
                matched.handler(),
                params.join(", ")
            );
        }
        None => println!("{path} -> no route"),
    }
}
