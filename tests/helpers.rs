// Shared test helpers for writing site fixtures to disk.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::fs;
use std::path::Path;

use site_audit::Config;
use tempfile::TempDir;

/// Writes `index.html` and `script.js` into a fresh temporary directory.
pub fn create_test_site(html: &str, js: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_file(dir.path(), "index.html", html);
    write_file(dir.path(), "script.js", js);
    dir
}

/// Writes a single file under `dir`.
#[allow(dead_code)] // Not used by the binary tests
pub fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("Failed to write fixture file");
}

/// Configuration auditing the default file names under `dir`.
#[allow(dead_code)] // Not used by the binary tests
pub fn config_for(dir: &Path) -> Config {
    Config {
        base_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

/// A page resembling a real storefront: a handful of products, a cart, a
/// booking modal, and every essential element.
#[allow(dead_code)] // Not used by every test file
pub const STOREFRONT_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
  <section id="hero">
    <div class="hero"><button onclick="openBooking()">Book</button></div>
  </section>
  <section id="catalog">
    <h2 id="catTitle">All</h2>
    <p id="catDesc"></p>
    <div id="pcGrid">
      <div class="card" data-cat="gaming"><img src="a.png" alt="Titan X"><button onclick="addToCart('Titan X')">Add</button></div>
      <div class="card" data-cat="office"><img src="b.png" alt="Desk One"><button onclick="addToCart('Desk One')">Add</button></div>
      <div class="card" data-cat="gaming"><img src="c.png" alt="Nova 5"><button onclick="addToCart('Nova 5')">Add</button></div>
    </div>
    <div id="catEmpty" hidden>No products</div>
  </section>
  <div id="cartOverlay" onclick="closeCart()"></div>
  <aside id="cartSidebar"></aside>
  <div id="bookingModal"></div>
</body>
</html>
"#;

#[allow(dead_code)] // Not used by every test file
pub const STOREFRONT_JS: &str = r#"function openBooking() {
  document.getElementById('bookingModal').hidden = false;
}

function addToCart(name) {
  cart.push(name);
}

function closeCart() {
  document.getElementById('cartOverlay').hidden = true;
}
"#;
