use eframe::egui;
use rand::Rng;

const PARTICLE_COUNT: usize = 50;
const FALL_SPEED_MIN: f32 = 60.0;
const FALL_SPEED_MAX: f32 = 140.0;
const SWAY_AMPLITUDE: f32 = 18.0;
const MAX_DELAY_SECONDS: f64 = 1.5;
const LIFETIME_SECONDS: f64 = 3.0;

struct Particle {
    start_x: f32,
    fall_speed: f32,
    sway_phase: f32,
    size: f32,
    color: egui::Color32,
    delay: f64,
}

pub struct Confetti {
    particles: Vec<Particle>,
    started_at: f64,
}

impl Confetti {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            started_at: 0.0,
        }
    }

    pub fn burst(&mut self, now: f64) {
        let mut rng = rand::rng();
        self.started_at = now;
        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                start_x: rng.random_range(0.0..1.0),
                fall_speed: rng.random_range(FALL_SPEED_MIN..FALL_SPEED_MAX),
                sway_phase: rng.random_range(0.0..std::f32::consts::TAU),
                size: rng.random_range(4.0..8.0),
                color: color_from_hue(rng.random_range(0.0..360.0)),
                delay: rng.random_range(0.0..MAX_DELAY_SECONDS),
            })
            .collect();
    }

    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    // Returns false once every particle has expired.
    pub fn paint(&mut self, painter: &egui::Painter, rect: egui::Rect, now: f64) -> bool {
        let elapsed = now - self.started_at;
        self.particles.retain(|p| elapsed < p.delay + LIFETIME_SECONDS);
        if self.particles.is_empty() {
            return false;
        }

        for particle in &self.particles {
            let age = (elapsed - particle.delay) as f32;
            if age < 0.0 {
                continue;
            }

            let x = rect.left()
                + particle.start_x * rect.width()
                + (age * 2.0 + particle.sway_phase).sin() * SWAY_AMPLITUDE;
            let y = rect.top() + age * particle.fall_speed;
            if y > rect.bottom() {
                continue;
            }

            painter.rect_filled(
                egui::Rect::from_center_size(
                    egui::pos2(x, y),
                    egui::vec2(particle.size, particle.size * 0.6),
                ),
                1.0,
                particle.color,
            );
        }

        true
    }
}

fn color_from_hue(hue: f32) -> egui::Color32 {
    let saturation = 0.8_f32;
    let lightness = 0.6_f32;

    let c = (1.0_f32 - (2.0_f32 * lightness - 1.0_f32).abs()) * saturation;
    let x = c * (1.0_f32 - ((hue / 60.0_f32) % 2.0_f32 - 1.0_f32).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = if hue < 60.0 {
        (c, x, 0.0)
    } else if hue < 120.0 {
        (x, c, 0.0)
    } else if hue < 180.0 {
        (0.0, c, x)
    } else if hue < 240.0 {
        (0.0, x, c)
    } else if hue < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    egui::Color32::from_rgb(
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}
