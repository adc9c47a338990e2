use rand::Rng;

pub const PARTICLE_RGB: (u8, u8, u8) = (0, 243, 255);
const INITIAL_LIFE: f64 = 100.0;
const LIFE_DECAY: f64 = 2.0;
const SIZE_RANGE: std::ops::Range<f64> = 1.0..4.0;
const SPEED_RANGE: std::ops::Range<f64> = -1.5..1.5;
const SIZE_FLOOR: f64 = 0.2;
const SIZE_DECAY: f64 = 0.05;

pub trait ParticleSurface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub life: f64,
}

impl Particle {
    pub fn new(x: f64, y: f64, rng: &mut impl Rng) -> Self {
        Self {
            x,
            y,
            size: rng.gen_range(SIZE_RANGE),
            speed_x: rng.gen_range(SPEED_RANGE),
            speed_y: rng.gen_range(SPEED_RANGE),
            life: INITIAL_LIFE,
        }
    }

    pub fn update(&mut self) {
        self.x += self.speed_x;
        self.y += self.speed_y;
        self.life = (self.life - LIFE_DECAY).max(0.0);
        if self.size > SIZE_FLOOR {
            self.size -= SIZE_DECAY;
        }
    }

    pub fn opacity(&self) -> f64 {
        self.life / INITIAL_LIFE
    }

    pub fn is_expired(&self) -> bool {
        self.life <= 0.0
    }

    fn color(&self) -> String {
        let (r, g, b) = PARTICLE_RGB;
        format!("rgba({r}, {g}, {b}, {})", self.opacity())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnBand {
    pub top: f64,
    pub bottom: f64,
}

impl SpawnBand {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y <= self.bottom
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    capacity: usize,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new(capacity: usize, width: f64, height: f64) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            capacity,
            width,
            height,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Adds a particle at the pointer if it is inside `band` and the field
    /// has room. Returns whether one was added.
    pub fn spawn_at(&mut self, x: f64, y: f64, band: SpawnBand, rng: &mut impl Rng) -> bool {
        if !band.contains(y) || self.particles.len() >= self.capacity {
            return false;
        }
        self.particles.push(Particle::new(x, y, rng));
        true
    }

    pub fn frame(&mut self, surface: &mut impl ParticleSurface) {
        surface.clear(self.width, self.height);

        for index in (0..self.particles.len()).rev() {
            let particle = &mut self.particles[index];
            particle.update();
            surface.fill_circle(particle.x, particle.y, particle.size, &particle.color());

            if particle.is_expired() {
                self.particles.remove(index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[derive(Default)]
    struct RecordingSurface {
        clears: Vec<(f64, f64)>,
        circles: Vec<(f64, f64, f64, String)>,
    }

    impl ParticleSurface for RecordingSurface {
        fn clear(&mut self, width: f64, height: f64) {
            self.clears.push((width, height));
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
            self.circles.push((x, y, radius, color.to_string()));
        }
    }

    const HERO: SpawnBand = SpawnBand {
        top: 0.0,
        bottom: 600.0,
    };

    #[test]
    fn new_particles_have_bounded_randomness() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let particle = Particle::new(10.0, 20.0, &mut rng);
            assert!((1.0..4.0).contains(&particle.size));
            assert!((-1.5..1.5).contains(&particle.speed_x));
            assert!((-1.5..1.5).contains(&particle.speed_y));
            assert_eq!(particle.life, 100.0);
        }
    }

    #[test]
    fn spawn_respects_band_and_capacity() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::new(3, 800.0, 600.0);

        assert!(!field.spawn_at(5.0, 601.0, HERO, &mut rng));
        assert!(!field.spawn_at(5.0, -1.0, HERO, &mut rng));
        assert!(field.spawn_at(5.0, 600.0, HERO, &mut rng));
        assert!(field.spawn_at(5.0, 0.0, HERO, &mut rng));
        assert!(field.spawn_at(5.0, 300.0, HERO, &mut rng));
        assert!(!field.spawn_at(5.0, 300.0, HERO, &mut rng));
        assert_eq!(field.len(), 3);
    }

    #[test]
    fn particles_fade_and_expire_after_fifty_frames() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = ParticleField::new(50, 800.0, 600.0);
        let mut surface = RecordingSurface::default();
        field.spawn_at(100.0, 100.0, HERO, &mut rng);

        let mut last_life = field.particles()[0].life;
        for _ in 0..49 {
            field.frame(&mut surface);
            let life = field.particles()[0].life;
            assert!(life < last_life);
            last_life = life;
        }
        assert_eq!(last_life, 2.0);

        field.frame(&mut surface);
        assert!(field.is_empty());
        assert_eq!(surface.clears.len(), 50);
        assert_eq!(surface.circles.len(), 50);
        assert_eq!(surface.circles[0].3, "rgba(0, 243, 255, 0.98)");
        assert_eq!(surface.circles[49].3, "rgba(0, 243, 255, 0)");
    }

    #[test]
    fn size_never_shrinks_far_below_floor() {
        let mut particle = Particle {
            x: 0.0,
            y: 0.0,
            size: 1.0,
            speed_x: 1.0,
            speed_y: -1.0,
            life: 100.0,
        };

        for _ in 0..50 {
            particle.update();
        }

        assert!(particle.size > 0.1);
        assert!(particle.size <= SIZE_FLOOR + 1e-9);
        assert_eq!((particle.x, particle.y), (50.0, -50.0));
    }

    #[test]
    fn field_never_exceeds_capacity_under_load() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut field = ParticleField::new(50, 800.0, 600.0);
        let mut surface = RecordingSurface::default();

        for step in 0..500 {
            for _ in 0..5 {
                field.spawn_at(step as f64, 200.0, HERO, &mut rng);
            }
            field.frame(&mut surface);
            assert!(field.len() <= field.capacity());
            assert!(field.particles().iter().all(|particle| particle.life > 0.0));
        }
    }

    #[test]
    fn resize_is_reflected_in_clears() {
        let mut field = ParticleField::new(50, 800.0, 600.0);
        let mut surface = RecordingSurface::default();

        field.resize(1024.0, 768.0);
        field.frame(&mut surface);

        assert_eq!(field.size(), (1024.0, 768.0));
        assert_eq!(surface.clears, vec![(1024.0, 768.0)]);
    }
}
