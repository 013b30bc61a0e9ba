use glam::Vec3;

/// Stable key for an object within one scene. Ids are never reused, so a
/// selection made before an object was removed cannot alias a newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

/// Remaining and initial lifetime of a decaying object, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lifespan {
    pub remaining: f32,
    pub initial: f32,
}

impl Lifespan {
    pub fn new(seconds: f32) -> Self {
        Self {
            remaining: seconds,
            initial: seconds,
        }
    }

    /// Fraction of life left, used directly as opacity. Never negative.
    #[inline]
    pub fn fraction(&self) -> f32 {
        if self.initial <= 0.0 {
            return 0.0;
        }
        (self.remaining / self.initial).max(0.0)
    }

    /// Advance by `delta` seconds. Returns false once the object is spent.
    #[inline]
    pub fn advance(&mut self, delta: f32) -> bool {
        self.remaining -= delta.max(0.0);
        self.remaining > 0.0
    }
}

/// One animated primitive (particle, orb, asteroid, project marker).
///
/// Fields:
/// - `position`, `rotation` (euler radians), `scale`: local transform inside the scene group
/// - `velocity`: per-frame drift, or per-second burst velocity for exploding sets
/// - `spin`: angular rate in rad/s accumulated into `rotation`
/// - `lifespan`: present only for decaying particles
/// - `payload`: opaque index into a static record list (e.g. a project)
/// - `brightness`: multiplier on the palette base color
#[derive(Clone, Debug, PartialEq)]
pub struct VisualObject {
    pub id: ObjectId,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    pub velocity: Vec3,
    pub spin: Vec3,
    pub lifespan: Option<Lifespan>,
    pub payload: Option<usize>,
    pub brightness: f32,
}

impl VisualObject {
    /// Largest scale component; used as the bounding-sphere radius for picking.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.scale.max_element()
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.lifespan.map_or(1.0, |l| l.fraction())
    }
}

/// Owned collection of the objects animated by one scene.
#[derive(Clone, Debug, Default)]
pub struct ObjectSet {
    objects: Vec<VisualObject>,
    next_id: u32,
}

impl ObjectSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object built by `make`, which receives the freshly allocated id.
    pub fn spawn(&mut self, make: impl FnOnce(ObjectId) -> VisualObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        let obj = make(id);
        debug_assert_eq!(obj.id, id);
        self.objects.push(obj);
        id
    }

    pub fn get(&self, id: ObjectId) -> Option<&VisualObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Remove by id, preserving the order of the remaining objects.
    pub fn remove(&mut self, id: ObjectId) -> Option<VisualObject> {
        let idx = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(idx))
    }

    pub fn retain_mut(&mut self, f: impl FnMut(&mut VisualObject) -> bool) {
        self.objects.retain_mut(f);
    }

    pub fn find_by_payload(&self, payload: usize) -> Option<&VisualObject> {
        self.objects.iter().find(|o| o.payload == Some(payload))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VisualObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, VisualObject> {
        self.objects.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

impl<'a> IntoIterator for &'a ObjectSet {
    type Item = &'a VisualObject;
    type IntoIter = std::slice::Iter<'a, VisualObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
