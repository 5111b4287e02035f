//! A simulation compiled to its own module and reached through JS.
//!
//! The foreign module owns its linear memory; this crate cannot borrow it
//! directly. Each frame calls the module's simulation function for a byte
//! address, then copies the configured window of its heap into a staging
//! buffer addressed at that same byte offset, so the core view sees the
//! simulation's own addresses.

use circles_core::{Region, Simulation};
use js_sys::{Function, Int32Array, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// [`Simulation`] backed by `module[simulation_fn]` and `module[heap].buffer`.
pub struct ForeignSimulation {
    module: JsValue,
    function: Function,
    heap: JsValue,
    data_length: usize,
    staging: Vec<i32>,
    address: usize,
}

impl ForeignSimulation {
    /// Bind to a global module object by name.
    pub fn from_global(
        module: &str,
        simulation_fn: &str,
        heap: &str,
        data_length: usize,
    ) -> Result<Self, JsValue> {
        let object = Reflect::get(&js_sys::global(), &JsValue::from_str(module))?;
        if object.is_undefined() || object.is_null() {
            return Err(JsValue::from_str(&format!("Module '{module}' not found")));
        }
        Self::new(object, simulation_fn, heap, data_length)
    }

    /// Bind to a module object.
    pub fn new(
        module: JsValue,
        simulation_fn: &str,
        heap: &str,
        data_length: usize,
    ) -> Result<Self, JsValue> {
        let function = Reflect::get(&module, &JsValue::from_str(simulation_fn))?
            .dyn_into::<Function>()
            .map_err(|_| format!("'{simulation_fn}' is not a function"))?;

        Ok(Self {
            module,
            function,
            heap: JsValue::from_str(heap),
            data_length,
            staging: vec![0; data_length],
            address: 0,
        })
    }

    /// Address returned by the last `advance`.
    pub const fn address(&self) -> usize {
        self.address
    }

    /// The staged copy of the last frame's records.
    pub fn staged(&self) -> &[i32] {
        &self.staging
    }

    fn call(&self, width: u32, height: u32) -> Result<usize, JsValue> {
        let offset = self.function.call2(
            &self.module,
            &JsValue::from(width),
            &JsValue::from(height),
        )?;
        let offset = offset
            .as_f64()
            .ok_or("simulation returned a non-numeric offset")?;
        Ok(offset as usize)
    }

    fn stage(&mut self, address: usize) -> Result<(), JsValue> {
        // Re-read every frame: growing the heap replaces its buffer.
        let heap = Reflect::get(&self.module, &self.heap)?;
        let buffer = Reflect::get(&heap, &JsValue::from_str("buffer"))?;
        if self.data_length == 0 {
            return Ok(());
        }
        // Out-of-range windows throw RangeError here, at the memory boundary.
        let window = Int32Array::new_with_byte_offset_and_length(
            &buffer,
            address as u32,
            self.data_length as u32,
        );
        window.copy_to(&mut self.staging);
        Ok(())
    }
}

impl Simulation for ForeignSimulation {
    fn advance(&mut self, width: u32, height: u32) -> usize {
        let staged = self
            .call(width, height)
            .and_then(|address| self.stage(address).map(|()| address));
        match staged {
            Ok(address) => {
                self.address = address;
                address
            }
            Err(e) => wasm_bindgen::throw_val(e),
        }
    }

    fn region(&self) -> Region<'_> {
        Region::at(self.address, Region::from_elements(&self.staging).bytes())
    }
}
