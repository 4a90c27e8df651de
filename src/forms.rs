pub mod descriptor;
pub use descriptor::{CampoFormulario, CondicaoExibicao, Mascara, OpcaoCampo, TipoCampo};
pub mod draft;
pub use draft::Formulario;
pub mod payload;
