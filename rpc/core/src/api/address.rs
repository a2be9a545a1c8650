use syscoin_txscript::Destination;

/// Renders a destination as a network address string
pub trait AddressEncoder {
    fn encode(&self, destination: &Destination) -> String;
}
