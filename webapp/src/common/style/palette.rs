// color classes handed out by the style descriptors in the site crate
//
// keep the names here in sync with site/src/style.rs and site/src/nav.rs
pub const PALETTE: &str = r#"
/* Backgrounds */
.bg-white { background-color: var(--white); }
.bg-stone-50 { background-color: var(--stone-50); }
.bg-stone-100 { background-color: var(--stone-100); }
.bg-stone-800 { background-color: var(--stone-800); }
.bg-stone-900 { background-color: var(--stone-900); }
.bg-stone-950 { background-color: var(--stone-950); }

/* Text */
.text-white { color: var(--white); }
.text-yellow { color: var(--yellow-400); }
.text-stone-100 { color: var(--stone-100); }
.text-stone-300 { color: var(--stone-300); }
.text-stone-400 { color: var(--stone-400); }
.text-stone-500 { color: var(--stone-500); }
.text-stone-600 { color: var(--stone-600); }
.text-stone-800 { color: var(--stone-800); }
.text-stone-900 { color: var(--stone-900); }

/* Borders */
.border-b { border-bottom: 1px solid; }
.border-stone-100 { border-color: var(--stone-100); }
.border-stone-200 { border-color: var(--stone-200); }
.border-stone-800 { border-color: var(--stone-800); }
.border-stone-900 { border-color: var(--stone-900); }
.border-white-10 { border-color: rgba(255, 255, 255, 0.1); }

/* Interaction */
.hover-bg-stone-100:hover { background-color: var(--stone-100); }
.hover-bg-stone-200:hover { background-color: var(--stone-200); }
.hover-bg-stone-700:hover { background-color: var(--stone-700); }
.hover-bg-stone-800:hover { background-color: var(--stone-800); }
.hover-bg-white-10:hover { background-color: rgba(255, 255, 255, 0.1); }
.hover-text-white:hover { color: var(--white); }
.hover-text-stone-900:hover { color: var(--stone-900); }
.hover-border-stone-700:hover { border-color: var(--stone-700); }
.hover-border-white-30:hover { border-color: rgba(255, 255, 255, 0.3); }
.group:hover .group-hover-text-white { color: var(--white); }
.group:hover .group-hover-text-stone-900 { color: var(--stone-900); }
.focus-border-stone-400:focus { border-color: var(--stone-400); }
.focus-border-stone-600:focus { border-color: var(--stone-600); }
"#;
