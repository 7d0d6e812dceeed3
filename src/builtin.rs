pub const BUILTIN_CSS: &str = include_str!("builtin.css");

/// Embedded in every rendered card so the static page can flip theme in the
/// browser the same way the CLI flag does: the `dark` class on `<body>`,
/// persisted as `"true"`/`"false"` under `darkMode`.
pub const THEME_TOGGLE_JS: &str = r#"(function () {
  var storageKey = "darkMode";
  var button = document.getElementById("dark-mode-toggle");

  function updateButton() {
    if (!button) return;
    button.textContent = document.body.classList.contains("dark") ? "\u{1F319}" : "\u{1F31E}";
  }

  var saved = null;
  try {
    saved = localStorage.getItem(storageKey);
  } catch (_) {
    saved = null;
  }
  if (saved === "true") {
    document.body.classList.add("dark");
  } else if (saved === "false") {
    document.body.classList.remove("dark");
  }
  updateButton();

  if (button) {
    button.addEventListener("click", function () {
      document.body.classList.toggle("dark");
      try {
        localStorage.setItem(storageKey, document.body.classList.contains("dark"));
      } catch (_) {}
      updateButton();
    });
  }
})();"#;
