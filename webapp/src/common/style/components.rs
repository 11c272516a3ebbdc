pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.icon {
  display: inline-block;
  flex-shrink: 0;
  vertical-align: middle;
}

/* Pill buttons, used by every call to action */
.pill {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  border: none;
  border-radius: var(--radius-full);
  font-size: 0.875rem;
  text-transform: uppercase;
  letter-spacing: var(--tracking-wide);
  cursor: pointer;
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

.pill-sm { padding: var(--space-2) var(--space-6); }
.pill-lg { padding: var(--space-4) var(--space-10); }
.pill-xl { padding: 20px var(--space-12); box-shadow: var(--shadow-lg); }

.pill-outline {
  background: transparent;
  border: 1px solid var(--white);
  color: var(--white);
}

.pill-outline:hover { background-color: rgba(255, 255, 255, 0.1); }

/* Logo */
.logo {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.logo-badge {
  width: 40px;
  height: 40px;
  border-radius: var(--radius-full);
  display: flex;
  align-items: center;
  justify-content: center;
  transition: background-color var(--transition-normal) var(--easing-standard);
}

.logo-badge-sm { width: 32px; height: 32px; }

.logo-text {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  letter-spacing: var(--tracking-widest);
  text-transform: uppercase;
  transition: color var(--transition-normal) var(--easing-standard);
}

/* Navigation bar */
.nav-bar {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 50;
  padding: var(--nav-padding) 0;
  backdrop-filter: blur(12px);
  -webkit-backdrop-filter: blur(12px);
  transition: all var(--transition-normal) var(--easing-standard);
}

.nav-transparent { background-color: transparent; }
.nav-solid-dark { background-color: var(--stone-950); border-bottom: 1px solid var(--stone-800); }
.nav-translucent-light { background-color: rgba(255, 255, 255, 0.9); box-shadow: var(--shadow-sm); }
.nav-translucent-dark { background-color: rgba(12, 10, 9, 0.9); border-bottom: 1px solid var(--stone-800); }

.nav-inner {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.nav-desktop {
  display: none;
  align-items: center;
  gap: var(--space-8);
}

.nav-link {
  font-size: 0.875rem;
  text-transform: uppercase;
  letter-spacing: var(--tracking-wide);
  text-decoration: none;
  transition: opacity var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

.nav-link:hover { opacity: 0.6; }

.nav-icon-button {
  padding: var(--space-2);
  border: none;
  border-radius: var(--radius-full);
  background: transparent;
  cursor: pointer;
  display: inline-flex;
  transition: background-color var(--transition-normal) var(--easing-standard);
}

.nav-mobile {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.nav-mobile button {
  border: none;
  background: transparent;
  cursor: pointer;
  display: inline-flex;
}

.mobile-panel {
  position: absolute;
  top: 100%;
  left: 0;
  width: 100%;
  padding: var(--space-8) var(--space-6);
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
  box-shadow: var(--shadow-xl);
  animation: menu-enter 0.2s var(--easing-standard) both;
}

.mobile-link {
  font-family: var(--font-serif);
  font-size: 1.125rem;
  text-decoration: none;
  padding-bottom: var(--space-2);
  border-bottom-width: 1px;
  border-bottom-style: solid;
}

.mobile-book {
  width: 100%;
  padding: var(--space-4) 0;
  border: none;
  text-transform: uppercase;
  letter-spacing: var(--tracking-wide);
  cursor: pointer;
}

@keyframes menu-enter {
  from { opacity: 0; transform: translateY(-20px); }
  to { opacity: 1; transform: translateY(0); }
}

@media (min-width: 768px) {
  .nav-desktop { display: flex; }
  .nav-mobile, .mobile-panel { display: none; }
}
"#;
