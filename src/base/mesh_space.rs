use super::{Material, Region, Structure};
use crate::StrError;
use russell_lab::Vector;
use std::ops::Range;

/// Holds the uniform one-dimensional mesh across the wall thickness
///
/// Nodes are numbered from the inner face (0) to the outer face (`node_count - 1`).
///
/// The inner steel region (and the steel modulus) extends one node past the inner interface.
/// The node at the outer interface takes the steel modulus but belongs to the concrete region.
/// Elements take the material of the layer they lie in.
///
/// ```text
///  steel_in          concrete            steel_out
/// 0---1---2 | 3---4---5---6---7---8---9 | 10
///     ↑ interface_in                  ↑ interface_out
///
/// modulus: S   S   S   C   C   C   C   C   C   S   S
/// ```
#[derive(Clone, Debug)]
pub struct MeshSpace {
    /// Length of every element
    pub element_length: f64,

    /// Number of elements
    pub element_count: usize,

    /// Number of nodes (element_count + 1)
    pub node_count: usize,

    /// Index of the node at the inner steel/concrete interface (zero if there is no inner steel)
    pub interface_in: usize,

    /// Index of the node at the outer concrete/steel interface (the last node if there is no outer steel)
    pub interface_out: usize,

    /// Node positions measured from the inner face (node_count)
    pub positions: Vector,

    /// Node radii measured from the axis (node_count)
    pub radii: Vector,

    /// Element centers measured from the inner face (element_count)
    pub element_centers: Vector,

    /// Element centers measured from the axis (element_count)
    pub element_radii: Vector,

    /// Material of each node selecting the modulus for the stresses (node_count)
    pub node_materials: Vec<Material>,

    /// Material of each element (element_count)
    pub element_materials: Vec<Material>,

    /// Node indices of the inner steel liner (empty if absent)
    pub steel_in: Range<usize>,

    /// Node indices of the concrete body
    pub concrete: Range<usize>,

    /// Node indices of the outer steel liner (empty if absent)
    pub steel_out: Range<usize>,
}

/// Returns the number of elements in a layer, or an error if the thickness is not a multiple of the element length
fn layer_element_count(thickness: f64, element_length: f64) -> Result<usize, StrError> {
    let n = f64::round(thickness / element_length);
    let tol = 1e-9 * f64::max(1.0, thickness);
    if f64::abs(n * element_length - thickness) > tol {
        return Err("layer thicknesses must be multiples of the element length");
    }
    Ok(n as usize)
}

impl MeshSpace {
    /// Allocates a new instance
    pub fn new(structure: &Structure) -> Result<Self, StrError> {
        if structure.validate().is_some() {
            return Err("cannot generate mesh because structure.validate() failed");
        }

        // number of elements in each layer
        let dx = structure.element_length;
        let n_in = layer_element_count(structure.steel_thick_in, dx)?;
        let n_concrete = layer_element_count(structure.concrete_thick, dx)?;
        let n_out = layer_element_count(structure.steel_thick_out, dx)?;
        if n_concrete < 1 {
            return Err("the concrete layer must have at least one element");
        }
        let element_count = n_in + n_concrete + n_out;
        let node_count = element_count + 1;

        // interfaces and regions
        let interface_in = n_in;
        let interface_out = element_count - n_out;
        let steel_in = if n_in > 0 { 0..(interface_in + 2) } else { 0..0 };
        let steel_out = if n_out > 0 {
            (interface_out + 1)..node_count
        } else {
            node_count..node_count
        };
        if steel_in.end >= steel_out.start {
            return Err("the concrete region must have at least one node");
        }
        let concrete = steel_in.end..steel_out.start;

        // coordinates
        let positions = Vector::initialized(node_count, |i| (i as f64) * dx);
        let radii = Vector::initialized(node_count, |i| structure.radius_in + (i as f64) * dx);
        let element_centers = Vector::initialized(element_count, |e| (e as f64) * dx + dx / 2.0);
        let element_radii = Vector::initialized(element_count, |e| structure.radius_in + (e as f64) * dx + dx / 2.0);

        // materials
        let node_materials = (0..node_count)
            .map(|i| {
                if (n_in > 0 && i <= interface_in + 1) || (n_out > 0 && i >= interface_out) {
                    Material::Steel
                } else {
                    Material::Concrete
                }
            })
            .collect();
        let element_materials = (0..element_count)
            .map(|e| {
                if e < n_in || e >= interface_out {
                    Material::Steel
                } else {
                    Material::Concrete
                }
            })
            .collect();

        Ok(MeshSpace {
            element_length: dx,
            element_count,
            node_count,
            interface_in,
            interface_out,
            positions,
            radii,
            element_centers,
            element_radii,
            node_materials,
            element_materials,
            steel_in,
            concrete,
            steel_out,
        })
    }

    /// Returns the node indices of a region (the range is empty if the region is absent)
    pub fn region(&self, region: Region) -> Range<usize> {
        match region {
            Region::SteelIn => self.steel_in.clone(),
            Region::Concrete => self.concrete.clone(),
            Region::SteelOut => self.steel_out.clone(),
        }
    }

    /// Returns true if the region has at least one node
    pub fn has_region(&self, region: Region) -> bool {
        !self.region(region).is_empty()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::MeshSpace;
    use crate::base::{Material, Region, Samples};
    use russell_lab::vec_approx_eq;

    #[test]
    fn new_captures_errors() {
        let mut structure = Samples::structure_small();
        structure.width = 0.0;
        assert_eq!(
            MeshSpace::new(&structure).err(),
            Some("cannot generate mesh because structure.validate() failed")
        );
        let mut structure = Samples::structure_small();
        structure.steel_thick_in = 0.15;
        assert_eq!(
            MeshSpace::new(&structure).err(),
            Some("layer thicknesses must be multiples of the element length")
        );
        let mut structure = Samples::structure_small();
        structure.concrete_thick = 0.1;
        assert_eq!(
            MeshSpace::new(&structure).err(),
            Some("the concrete region must have at least one node")
        );
    }

    #[test]
    fn new_works_with_two_steel_layers() {
        // 0.1 + 0.8 + 0.1 with dx = 0.1
        let structure = Samples::structure_small();
        let mesh = MeshSpace::new(&structure).unwrap();
        assert_eq!(mesh.element_count, 10);
        assert_eq!(mesh.node_count, 11);
        assert_eq!(mesh.interface_in, 1);
        assert_eq!(mesh.interface_out, 9);
        assert_eq!(mesh.steel_in, 0..3);
        assert_eq!(mesh.concrete, 3..10);
        assert_eq!(mesh.steel_out, 10..11);
        assert_eq!(mesh.node_materials[0], Material::Steel);
        assert_eq!(mesh.node_materials[1], Material::Steel);
        assert_eq!(mesh.node_materials[2], Material::Steel);
        assert_eq!(mesh.node_materials[3], Material::Concrete);
        assert_eq!(mesh.node_materials[8], Material::Concrete);
        assert_eq!(mesh.node_materials[9], Material::Steel);
        assert_eq!(mesh.node_materials[10], Material::Steel);
        assert_eq!(mesh.element_materials[0], Material::Steel);
        assert_eq!(mesh.element_materials[1], Material::Concrete);
        assert_eq!(mesh.element_materials[8], Material::Concrete);
        assert_eq!(mesh.element_materials[9], Material::Steel);
        vec_approx_eq(
            mesh.positions.as_data(),
            &[0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0],
            1e-15,
        );
        assert!((mesh.radii[0] - structure.radius_in).abs() < 1e-15);
        assert!((mesh.radii[10] - structure.radius_out()).abs() < 1e-13);
        assert!((mesh.element_centers[0] - 0.05).abs() < 1e-15);
        assert!((mesh.element_radii[9] - (structure.radius_in + 0.95)).abs() < 1e-13);
    }

    #[test]
    fn regions_concatenate_to_all_nodes() {
        for (steel_in, steel_out) in [(0.1, 0.1), (0.1, 0.0), (0.0, 0.1), (0.0, 0.0)] {
            let mut structure = Samples::structure_small();
            structure.steel_thick_in = steel_in;
            structure.steel_thick_out = steel_out;
            let mesh = MeshSpace::new(&structure).unwrap();
            let mut all = Vec::new();
            for region in Region::ALL {
                all.extend(mesh.region(region));
            }
            let correct: Vec<_> = (0..mesh.node_count).collect();
            assert_eq!(all, correct);
            assert_eq!(mesh.has_region(Region::SteelIn), steel_in > 0.0);
            assert_eq!(mesh.has_region(Region::SteelOut), steel_out > 0.0);
            assert!(mesh.has_region(Region::Concrete));
        }
    }

    #[test]
    fn interface_nodes_work() {
        // 8 mm inner liner, no outer liner, dx = 4 mm
        let mut structure = Samples::structure_small();
        structure.steel_thick_in = 0.008;
        structure.concrete_thick = 0.04;
        structure.steel_thick_out = 0.0;
        structure.element_length = 0.004;
        let mesh = MeshSpace::new(&structure).unwrap();
        assert_eq!(mesh.node_count, 13);
        assert_eq!(mesh.interface_in, 2);
        assert_eq!(mesh.steel_in, 0..4);
        assert_eq!(mesh.concrete, 4..13);
        assert!(!mesh.has_region(Region::SteelOut));
        for j in 0..4 {
            assert_eq!(mesh.node_materials[j], Material::Steel);
        }
        for j in 4..13 {
            assert_eq!(mesh.node_materials[j], Material::Concrete);
        }
        assert_eq!(mesh.element_materials[1], Material::Steel);
        assert_eq!(mesh.element_materials[2], Material::Concrete);

        // outer liner only
        structure.steel_thick_in = 0.0;
        structure.steel_thick_out = 0.008;
        let mesh = MeshSpace::new(&structure).unwrap();
        assert_eq!(mesh.interface_out, 10);
        assert!(!mesh.has_region(Region::SteelIn));
        assert_eq!(mesh.concrete, 0..11);
        assert_eq!(mesh.steel_out, 11..13);
        assert_eq!(mesh.node_materials[9], Material::Concrete);
        assert_eq!(mesh.node_materials[10], Material::Steel);
        assert_eq!(mesh.element_materials[9], Material::Concrete);
        assert_eq!(mesh.element_materials[10], Material::Steel);
    }

    #[test]
    fn homogeneous_wall_works() {
        let mut structure = Samples::structure_small();
        structure.steel_thick_in = 0.0;
        structure.steel_thick_out = 0.0;
        let mesh = MeshSpace::new(&structure).unwrap();
        assert_eq!(mesh.element_count, 8);
        assert_eq!(mesh.interface_in, 0);
        assert_eq!(mesh.interface_out, 8);
        assert_eq!(mesh.concrete, 0..9);
        assert!(mesh.node_materials.iter().all(|m| *m == Material::Concrete));
        assert!(mesh.element_materials.iter().all(|m| *m == Material::Concrete));
    }
}
