//! The star system container.
//!
//! Bodies live in an arena owned by [`StarSystem`] and refer to each other
//! through [`BodyId`]s. The system also keeps the flat lists consumers ask
//! for most (stars, stations, hyperspace clouds) and the system-wide
//! economy aggregates.

use std::ops::{Index, IndexMut};

use stellar::{BodySuperType, BodyType};
use tracing::trace;
use units::{Fixed, Fixed48};

use crate::body::{BodyId, SystemBody};
use crate::commodity::{Commodity, EconType};
use crate::error::SysgenError;
use crate::path::SystemPath;
use crate::polit::SysPolit;

#[derive(Debug, Clone, PartialEq)]
pub struct StarSystem {
    path: SystemPath,
    bodies: Vec<Option<SystemBody>>,
    root: Option<BodyId>,
    stars: Vec<BodyId>,
    space_stations: Vec<BodyId>,
    hyperspace_clouds: Vec<BodyId>,

    pub name: String,
    pub seed: u32,
    pub num_stars: usize,
    pub short_desc: String,
    pub long_desc: String,
    pub faction: Option<String>,
    pub polit: SysPolit,
    pub unexplored: bool,
    pub is_custom: bool,
    pub has_custom_bodies: bool,

    // =========================================================================
    // Economy aggregates
    // =========================================================================
    pub metallicity: Fixed,
    pub industrial: Fixed,
    pub agricultural: Fixed,
    pub human_prox: Fixed,
    pub total_pop: Fixed,
    pub econ_type: EconType,
    pub trade_level: [i32; Commodity::COUNT],
}

impl StarSystem {
    /// An empty system at `path` (any body selector is dropped).
    pub fn new(path: SystemPath, name: impl Into<String>, seed: u32) -> Self {
        Self {
            path: path.system_only(),
            bodies: Vec::new(),
            root: None,
            stars: Vec::new(),
            space_stations: Vec::new(),
            hyperspace_clouds: Vec::new(),
            name: name.into(),
            seed,
            num_stars: 0,
            short_desc: String::new(),
            long_desc: String::new(),
            faction: None,
            polit: SysPolit::default(),
            unexplored: false,
            is_custom: false,
            has_custom_bodies: false,
            metallicity: Fixed::ZERO,
            industrial: Fixed::ZERO,
            agricultural: Fixed::ZERO,
            human_prox: Fixed::ZERO,
            total_pop: Fixed::ZERO,
            econ_type: EconType::NONE,
            trade_level: [0; Commodity::COUNT],
        }
    }

    pub fn path(&self) -> SystemPath {
        self.path
    }

    // =========================================================================
    // Arena
    // =========================================================================

    /// Allocates a detached body of the given kind.
    pub fn new_body(&mut self, body_type: BodyType) -> BodyId {
        let index = self.bodies.len() as u32;
        let id = BodyId(index);
        self.bodies
            .push(Some(SystemBody::new(id, self.path.with_body(index), body_type)));
        id
    }

    pub fn body(&self, id: BodyId) -> Option<&SystemBody> {
        self.bodies.get(id.index()).and_then(Option::as_ref)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut SystemBody> {
        self.bodies.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Live bodies in creation order.
    pub fn bodies(&self) -> impl Iterator<Item = &SystemBody> {
        self.bodies.iter().flatten()
    }

    pub fn body_count(&self) -> usize {
        self.bodies().count()
    }

    /// Resolves a body path of this system.
    pub fn body_by_path(&self, path: &SystemPath) -> Result<&SystemBody, SysgenError> {
        if !path.is_same_system(&self.path) {
            return Err(SysgenError::WrongSystem {
                expected: self.path,
                got: *path,
            });
        }
        let index = path.body_index.ok_or(SysgenError::NotABodyPath(*path))?;
        let id = BodyId(index);
        self.body(id).ok_or(SysgenError::NoSuchBody(id))
    }

    // =========================================================================
    // Tree
    // =========================================================================

    pub fn root(&self) -> Option<BodyId> {
        self.root
    }

    pub fn root_body(&self) -> Option<&SystemBody> {
        self.root.and_then(|id| self.body(id))
    }

    pub fn set_root(&mut self, id: BodyId) {
        self.root = Some(id);
    }

    /// Appends `child` to `parent`'s children.
    pub fn attach(&mut self, parent: BodyId, child: BodyId) {
        self[child].parent = Some(parent);
        self[parent].children.push(child);
    }

    /// Inserts `child` as `parent`'s first child.
    pub fn attach_front(&mut self, parent: BodyId, child: BodyId) {
        self[child].parent = Some(parent);
        self[parent].children.insert(0, child);
    }

    pub fn children_of(&self, id: BodyId) -> &[BodyId] {
        self.body(id).map(|b| b.children.as_slice()).unwrap_or(&[])
    }

    /// Every body under `id` (excluding `id`), children before grandchildren
    /// of the next sibling.
    pub fn descendants(&self, id: BodyId) -> Vec<BodyId> {
        let mut out = Vec::new();
        let mut stack: Vec<BodyId> = self.children_of(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children_of(next).iter().rev());
        }
        out
    }

    // =========================================================================
    // Flat lists
    // =========================================================================

    pub fn stars(&self) -> &[BodyId] {
        &self.stars
    }

    pub fn space_stations(&self) -> &[BodyId] {
        &self.space_stations
    }

    pub fn hyperspace_clouds(&self) -> &[BodyId] {
        &self.hyperspace_clouds
    }

    pub fn register_star(&mut self, id: BodyId) {
        self.stars.push(id);
    }

    pub fn register_station(&mut self, id: BodyId) {
        self.space_stations.push(id);
    }

    pub fn register_hyperspace_cloud(&mut self, id: BodyId) {
        self.hyperspace_clouds.push(id);
    }

    pub fn trade_level(&self, commodity: Commodity) -> i32 {
        self.trade_level[commodity.index()]
    }

    // =========================================================================
    // Orbital queries
    // =========================================================================

    /// Radius (AU) of the region where `id`'s gravity dominates its
    /// primary's: `a(1-e) * cbrt(m / 3M)`. Zero for stars and grav points.
    pub fn hill_radius(&self, id: BodyId) -> Fixed {
        let Some(body) = self.body(id) else {
            return Fixed::ZERO;
        };
        if body.super_type() <= BodySuperType::Star {
            return Fixed::ZERO;
        }
        let Some(primary) = body.parent.and_then(|p| self.body(p)) else {
            return Fixed::ZERO;
        };

        let primary_mass = primary.mass_in_earths();
        let ratio = Fixed48::quotient(body.mass, primary_mass * 3);
        let periapsis: Fixed48 = (body.semi_major_axis * (Fixed::ONE - body.eccentricity)).convert();
        (periapsis * ratio.cbrt()).convert()
    }

    /// Walks up from `id` to the first star or grav point and returns it
    /// with the orbital range of the body that orbits it directly.
    pub fn find_star_and_true_orbital_range(&self, id: BodyId) -> Option<(BodyId, Fixed, Fixed)> {
        let mut planet = self.body(id)?;
        let mut star = self.body(planet.parent?)?;
        while star.super_type() > BodySuperType::Star {
            planet = star;
            star = self.body(star.parent?)?;
        }
        Some((star.id, planet.orb_min, planet.orb_max))
    }

    /// Largest apoapsis among `id`'s children, in metres.
    pub fn max_child_orbital_distance(&self, id: BodyId) -> f64 {
        self.children_of(id)
            .iter()
            .filter_map(|c| self.body(*c))
            .map(|c| c.orb_max.to_f64())
            .fold(0.0, f64::max)
            * units::AU
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Removes a childless, non-root body from the tree and from whichever
    /// flat list tracks its kind.
    pub fn destroy_body(&mut self, id: BodyId) -> Result<(), SysgenError> {
        let body = self.body(id).ok_or(SysgenError::NoSuchBody(id))?;
        if body.has_children() {
            return Err(SysgenError::BodyHasChildren(id));
        }
        if self.root == Some(id) {
            return Err(SysgenError::CannotDestroyRoot(id));
        }
        let super_type = body.super_type();
        let parent = body.parent;

        match super_type {
            BodySuperType::Starport => self.space_stations.retain(|s| *s != id),
            BodySuperType::Star => self.stars.retain(|s| *s != id),
            BodySuperType::HyperspaceCloud => self.hyperspace_clouds.retain(|s| *s != id),
            _ => {}
        }
        if let Some(parent) = parent.and_then(|p| self.body_mut(p)) {
            parent.children.retain(|c| *c != id);
        }
        self.bodies[id.index()] = None;
        trace!(body = %id, system = %self.path, "destroyed body");
        Ok(())
    }
}

/// Arena access. Panics on ids of destroyed bodies, like slice indexing.
impl Index<BodyId> for StarSystem {
    type Output = SystemBody;

    fn index(&self, id: BodyId) -> &SystemBody {
        match self.body(id) {
            Some(body) => body,
            None => panic!("no live body {} in system {}", id, self.path),
        }
    }
}

impl IndexMut<BodyId> for StarSystem {
    fn index_mut(&mut self, id: BodyId) -> &mut SystemBody {
        let path = self.path;
        match self.body_mut(id) {
            Some(body) => body,
            None => panic!("no live body {} in system {}", id, path),
        }
    }
}
