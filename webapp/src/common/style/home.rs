pub const HOME_STYLES: &str = r#"
/* Page sections */

.page {
  min-height: 100vh;
  font-family: var(--font-sans);
  transition: background-color var(--transition-slow) var(--easing-standard),
              color var(--transition-slow) var(--easing-standard);
}

.section {
  padding: var(--space-24) 0;
  overflow: hidden;
  transition: background-color var(--transition-slow) var(--easing-standard);
}

.section-header {
  text-align: center;
  margin-bottom: var(--space-16);
}

.section-title {
  font-family: var(--font-serif);
  font-size: 2.25rem;
  font-weight: 400;
  margin-bottom: var(--space-4);
}

.section-lede {
  max-width: 36rem;
  margin: 0 auto;
}

.serif { font-family: var(--font-serif); }

/* Hero */
.hero {
  position: relative;
  height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
}

.hero-backdrop {
  position: absolute;
  inset: 0;
  z-index: 0;
}

.hero-backdrop img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hero-shade {
  position: absolute;
  inset: 0;
  background-color: rgba(28, 25, 23, 0.4);
}

.hero-content {
  position: relative;
  z-index: 10;
  text-align: center;
  padding: 0 var(--space-6);
  max-width: 56rem;
}

.hero-eyebrow {
  display: block;
  color: rgba(255, 255, 255, 0.8);
  text-transform: uppercase;
  letter-spacing: var(--tracking-widest);
  font-size: 0.875rem;
  margin-bottom: var(--space-6);
}

.hero-title {
  font-family: var(--font-serif);
  font-weight: 400;
  font-size: 3rem;
  line-height: 1.2;
  color: var(--white);
  margin-bottom: var(--space-8);
}

.hero-actions {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  justify-content: center;
}

.hero-cue {
  position: absolute;
  bottom: var(--space-10);
  left: 50%;
  width: 1px;
  height: var(--space-12);
  background-color: rgba(255, 255, 255, 0.3);
  animation: cue 2s ease-in-out infinite;
}

/* Services */
.service-grid {
  display: grid;
  gap: var(--space-8);
}

.service-card {
  overflow: hidden;
  cursor: pointer;
  box-shadow: var(--shadow-sm);
  transition: transform var(--transition-slow) var(--easing-standard),
              box-shadow var(--transition-slow) var(--easing-standard),
              background-color var(--transition-slow) var(--easing-standard);
}

.service-card:hover {
  transform: translateY(-10px);
  box-shadow: var(--shadow-xl);
}

.service-image {
  height: 16rem;
  overflow: hidden;
}

.service-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 700ms var(--easing-standard);
}

.service-card:hover .service-image img { transform: scale(1.1); }

.service-body { padding: var(--space-8); }
.service-icon { margin-bottom: var(--space-4); }
.service-body h3 { font-family: var(--font-serif); font-size: 1.25rem; font-weight: 400; margin-bottom: var(--space-2); }
.service-body p { font-size: 0.875rem; line-height: 1.6; margin-bottom: var(--space-6); }

.service-footer {
  display: flex;
  justify-content: space-between;
  align-items: center;
  border-top-width: 1px;
  border-top-style: solid;
  padding-top: var(--space-6);
}

.service-book {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  border: none;
  background: transparent;
  font-size: 0.875rem;
  text-transform: uppercase;
  letter-spacing: var(--tracking-wide);
  cursor: pointer;
}

/* Experience */
.experience-grid {
  display: grid;
  gap: var(--space-16);
  align-items: center;
}

.experience-gallery { position: relative; }

.experience-photos {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-4);
}

.experience-photos img { width: 100%; border-radius: var(--radius-2xl); }
.experience-photos img:first-child { margin-top: var(--space-12); }

.experience-badge {
  display: none;
  position: absolute;
  bottom: -24px;
  right: -24px;
  padding: var(--space-8);
  border-radius: var(--radius-2xl);
}

.experience-badge .figure { font-family: var(--font-serif); font-size: 1.875rem; margin-bottom: var(--space-1); }
.experience-badge .caption { font-size: 0.75rem; text-transform: uppercase; letter-spacing: var(--tracking-wide); opacity: 0.7; }

.eyebrow {
  display: block;
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: var(--tracking-wide);
  margin-bottom: var(--space-4);
}

.experience-copy { font-size: 1.125rem; line-height: 1.7; margin-bottom: var(--space-8); }

.highlights { display: flex; flex-direction: column; gap: var(--space-6); }
.highlight { display: flex; gap: var(--space-4); }
.highlight h4 { font-weight: 500; }
.highlight p { font-size: 0.875rem; }

.bullet {
  width: 24px;
  height: 24px;
  margin-top: var(--space-1);
  border-radius: var(--radius-full);
  display: flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
}

/* Call to action */
.cta { padding: var(--space-20) 0; text-align: center; }
.cta h2 { font-family: var(--font-serif); font-style: italic; font-weight: 400; font-size: 1.875rem; margin-bottom: var(--space-8); }

/* Testimonials */
.stars { display: flex; justify-content: center; gap: var(--space-1); margin-bottom: var(--space-4); color: var(--stone-400); }

.testimonial-grid { display: grid; gap: var(--space-12); }

.testimonial {
  position: relative;
  padding: var(--space-8);
  border-width: 1px;
  border-style: solid;
  transition: border-color var(--transition-normal) var(--easing-standard);
}

.testimonial .quote { font-size: 1.125rem; font-style: italic; margin-bottom: var(--space-8); color: var(--stone-300); }
.testimonial .name { font-family: var(--font-serif); font-size: 1.25rem; }
.testimonial .role { font-size: 0.75rem; text-transform: uppercase; letter-spacing: var(--tracking-wide); color: var(--stone-500); margin-top: var(--space-1); }

/* Footer */
.footer {
  padding: var(--space-20) 0 var(--space-10);
  border-top-width: 1px;
  border-top-style: solid;
  transition: background-color var(--transition-slow) var(--easing-standard);
}

.footer-grid { display: grid; gap: var(--space-12); margin-bottom: var(--space-16); }
.footer h4 { font-family: var(--font-serif); font-size: 1.125rem; font-weight: 400; margin-bottom: var(--space-6); }
.footer ul { list-style: none; display: flex; flex-direction: column; gap: var(--space-4); font-size: 0.875rem; }
.footer ul a { color: inherit; text-decoration: none; }
.footer-blurb { font-size: 0.875rem; line-height: 1.6; margin: var(--space-6) 0; }
.footer-social { display: flex; gap: var(--space-4); }
.footer-social .icon { cursor: pointer; transition: color var(--transition-normal) var(--easing-standard); }
.contact-line { display: flex; align-items: center; gap: var(--space-3); }

.newsletter { display: flex; }
.newsletter input { flex: 1; border-width: 1px; border-style: solid; padding: var(--space-2) var(--space-4); font-size: 0.875rem; outline: none; }
.newsletter button { border: none; padding: var(--space-2) var(--space-4); font-size: 0.875rem; text-transform: uppercase; letter-spacing: var(--tracking-wide); cursor: pointer; }

.footer-legal {
  padding-top: var(--space-8);
  border-top-width: 1px;
  border-top-style: solid;
  text-align: center;
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: var(--tracking-wide);
  color: var(--stone-400);
}

/* Entrance animations, run once when the element mounts */
.fade-up { animation: fade-up 0.8s var(--easing-standard) both; }
.delay-200 { animation-delay: 0.2s; }
.delay-400 { animation-delay: 0.4s; }

@keyframes fade-up {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes cue {
  0%, 100% { transform: translate(-50%, 0); }
  50% { transform: translate(-50%, 10px); }
}

@media (min-width: 768px) {
  .hero-title { font-size: 6rem; }
  .hero-actions { flex-direction: row; }
  .service-grid, .testimonial-grid { grid-template-columns: repeat(3, 1fr); }
  .footer-grid { grid-template-columns: repeat(4, 1fr); }
  .experience-badge { display: block; }
  .cta h2 { font-size: 2.25rem; }
}

@media (min-width: 1024px) {
  .experience-grid { grid-template-columns: 1fr 1fr; }
}
"#;
